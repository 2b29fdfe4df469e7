// Prompt module definition
mod registry;
mod template;

pub use registry::{
    UseCase, COLD_EMAIL_TEMPLATE, EMAIL_TEMPLATE, SUBJECT_LINE_TEMPLATE, TONE_CONVERTER_TEMPLATE,
};
pub use template::{bullet_list, FieldSet, PromptError, PromptTemplate};
