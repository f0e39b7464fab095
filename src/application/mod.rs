//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates wizard sessions, the session store and the
//! content backend. Commands mutate a session; queries read one.

pub mod handlers;

pub use handlers::wizard::{
    CheckPlagiarismCommand, CheckPlagiarismHandler, ComposeEdit, CopyRephrasedQuery,
    CopyRephrasedResult, EditComposeCommand, EditComposeHandler, EditRephraseCommand,
    EditRephraseHandler, EndWizardCommand, EndWizardHandler, GenerateContentCommand,
    GenerateContentHandler, GetWizardHandler, GetWizardQuery, NavigateWizardCommand,
    NavigateWizardHandler, Navigation, RephraseContentCommand, RephraseContentHandler,
    RephraseEdit, StartWizardCommand, StartWizardHandler, WizardOutcome,
};
