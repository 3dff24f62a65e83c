mod catalog;
mod label;
mod label_set;
mod repository_path;
mod template;

pub use catalog::default_label_set;
pub use label::{Label, LabelColor, LabelColorError};
pub use label_set::{LabelSet, LabelSetError};
pub use repository_path::{RepositoryPath, RepositoryPathError};
pub use template::{
    IssueTemplate, TemplateError, TemplateFrontMatter, TemplateKind,
};
