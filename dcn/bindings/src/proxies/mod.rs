mod bound;
mod dcn_registry;
mod multi_privilege;

pub use bound::BoundContract;
pub use dcn_registry::DcnRegistry;
pub use multi_privilege::{
	MultiPrivilege,
	PrivilegeRecord,
};
