pub use prompt_protocol::{
    FieldSpec, FormatMode, PromptRequest, PromptResult, Selection, Selections,
};
