mod export;
mod format;
mod markdown;

pub use export::{proposal_file_name, ExportError, ProposalExporter};
pub use format::format_euros;
pub use markdown::{profile_fields, render_proposal, NEXT_STEPS};
