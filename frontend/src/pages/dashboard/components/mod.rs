pub mod details;
pub mod dialogs;
pub mod documents;
pub mod record_list;
pub mod users_table;

pub use details::DetailsPanel;
pub use dialogs::{RejectReasonDialog, SessionExpiredDialog};
pub use documents::DocumentPanel;
pub use record_list::{RecordList, SearchBox};
pub use users_table::UsersTable;
