pub mod currency;
pub mod entry;
pub mod field;
pub mod form;
pub mod ids;
pub mod logic;

pub use currency::Currency;
pub use entry::Entry;
pub use field::{Choice, FieldDescriptor, FieldInput, FieldType};
pub use form::{Form, Pagination};
pub use ids::{EntryId, FieldId, FormId, InputKey, UserId};
pub use logic::{ConditionalLogic, LogicAction, LogicMode, LogicRule, RuleOperator};
