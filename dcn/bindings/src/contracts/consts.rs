pub(crate) const DCN_REGISTRY_ABI: &str =
	include_str!("../../../../resources/abi/DcnRegistry.json");
pub(crate) const MULTI_PRIVILEGE_ABI: &str =
	include_str!("../../../../resources/abi/MultiPrivilege.json");
