mod overrides;
mod proptest_props;

use std::sync::Arc;

use super::*;

pub(super) fn default_translator() -> Translator {
    Translator::new(Arc::new(Tables::load_default().unwrap()))
}

pub(super) fn tr(input: &str) -> String {
    default_translator().translate(input).output
}
