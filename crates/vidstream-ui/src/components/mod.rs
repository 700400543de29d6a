pub(crate) mod language_switcher;
pub(crate) mod nav;
pub(crate) mod shell;
