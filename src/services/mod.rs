mod prompter_dialoguer;

pub use prompter_dialoguer::DialoguerPrompter;
