use dcn_primitives::types::Selector;

/// Name, canonical signature and 4-byte selector of a contract function.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FunctionSelector {
	pub name: &'static str,
	pub signature: &'static str,
	pub selector: Selector,
}

pub const DCN_REGISTRY_FUNCTIONS: &[FunctionSelector] = &[
	FunctionSelector {
		name: "DEFAULT_ADMIN_ROLE",
		signature: "DEFAULT_ADMIN_ROLE()",
		selector: [0xa2, 0x17, 0xfd, 0xdf],
	},
	FunctionSelector {
		name: "GRACE_PERIOD",
		signature: "GRACE_PERIOD()",
		selector: [0xc1, 0xa2, 0x87, 0xe2],
	},
	FunctionSelector {
		name: "REGISTRAR_ROLE",
		signature: "REGISTRAR_ROLE()",
		selector: [0xf6, 0x8e, 0x95, 0x53],
	},
	FunctionSelector {
		name: "approve",
		signature: "approve(address,uint256)",
		selector: [0x09, 0x5e, 0xa7, 0xb3],
	},
	FunctionSelector {
		name: "available",
		signature: "available(uint256)",
		selector: [0x96, 0xe4, 0x94, 0xe8],
	},
	FunctionSelector {
		name: "balanceOf",
		signature: "balanceOf(address)",
		selector: [0x70, 0xa0, 0x82, 0x31],
	},
	FunctionSelector {
		name: "baseNode",
		signature: "baseNode()",
		selector: [0xdd, 0xf7, 0xfc, 0xb0],
	},
	FunctionSelector {
		name: "getApproved",
		signature: "getApproved(uint256)",
		selector: [0x08, 0x18, 0x12, 0xfc],
	},
	FunctionSelector {
		name: "getRoleAdmin",
		signature: "getRoleAdmin(bytes32)",
		selector: [0x24, 0x8a, 0x9c, 0xa3],
	},
	FunctionSelector {
		name: "grantRole",
		signature: "grantRole(bytes32,address)",
		selector: [0x2f, 0x2f, 0xf1, 0x5d],
	},
	FunctionSelector {
		name: "hasRole",
		signature: "hasRole(bytes32,address)",
		selector: [0x91, 0xd1, 0x48, 0x54],
	},
	FunctionSelector {
		name: "isApprovedForAll",
		signature: "isApprovedForAll(address,address)",
		selector: [0xe9, 0x85, 0xe9, 0xc5],
	},
	FunctionSelector {
		name: "name",
		signature: "name()",
		selector: [0x06, 0xfd, 0xde, 0x03],
	},
	FunctionSelector {
		name: "nameExpires",
		signature: "nameExpires(uint256)",
		selector: [0xd6, 0xe4, 0xfa, 0x86],
	},
	FunctionSelector {
		name: "nameOf",
		signature: "nameOf(uint256)",
		selector: [0x05, 0x1a, 0x26, 0x64],
	},
	FunctionSelector {
		name: "ownerOf",
		signature: "ownerOf(uint256)",
		selector: [0x63, 0x52, 0x21, 0x1e],
	},
	FunctionSelector {
		name: "pause",
		signature: "pause()",
		selector: [0x84, 0x56, 0xcb, 0x59],
	},
	FunctionSelector {
		name: "paused",
		signature: "paused()",
		selector: [0x5c, 0x97, 0x5a, 0xbb],
	},
	FunctionSelector {
		name: "reclaim",
		signature: "reclaim(uint256,address)",
		selector: [0x28, 0xed, 0x4f, 0x6c],
	},
	FunctionSelector {
		name: "register",
		signature: "register(string,address,uint256)",
		selector: [0xd3, 0x93, 0xc8, 0x71],
	},
	FunctionSelector {
		name: "renew",
		signature: "renew(uint256,uint256)",
		selector: [0xc4, 0x75, 0xab, 0xff],
	},
	FunctionSelector {
		name: "renounceRole",
		signature: "renounceRole(bytes32,address)",
		selector: [0x36, 0x56, 0x8a, 0xbe],
	},
	FunctionSelector {
		name: "revokeRole",
		signature: "revokeRole(bytes32,address)",
		selector: [0xd5, 0x47, 0x74, 0x1f],
	},
	FunctionSelector {
		name: "safeTransferFrom",
		signature: "safeTransferFrom(address,address,uint256)",
		selector: [0x42, 0x84, 0x2e, 0x0e],
	},
	FunctionSelector {
		name: "safeTransferFrom",
		signature: "safeTransferFrom(address,address,uint256,bytes)",
		selector: [0xb8, 0x8d, 0x4f, 0xde],
	},
	FunctionSelector {
		name: "setApprovalForAll",
		signature: "setApprovalForAll(address,bool)",
		selector: [0xa2, 0x2c, 0xb4, 0x65],
	},
	FunctionSelector {
		name: "setBaseURI",
		signature: "setBaseURI(string)",
		selector: [0x55, 0xf8, 0x04, 0xb3],
	},
	FunctionSelector {
		name: "supportsInterface",
		signature: "supportsInterface(bytes4)",
		selector: [0x01, 0xff, 0xc9, 0xa7],
	},
	FunctionSelector {
		name: "symbol",
		signature: "symbol()",
		selector: [0x95, 0xd8, 0x9b, 0x41],
	},
	FunctionSelector {
		name: "tokenURI",
		signature: "tokenURI(uint256)",
		selector: [0xc8, 0x7b, 0x56, 0xdd],
	},
	FunctionSelector {
		name: "transferFrom",
		signature: "transferFrom(address,address,uint256)",
		selector: [0x23, 0xb8, 0x72, 0xdd],
	},
	FunctionSelector {
		name: "unpause",
		signature: "unpause()",
		selector: [0x3f, 0x4b, 0xa8, 0x3a],
	},
];

pub const MULTI_PRIVILEGE_FUNCTIONS: &[FunctionSelector] = &[
	FunctionSelector {
		name: "DEFAULT_ADMIN_ROLE",
		signature: "DEFAULT_ADMIN_ROLE()",
		selector: [0xa2, 0x17, 0xfd, 0xdf],
	},
	FunctionSelector {
		name: "MINTER_ROLE",
		signature: "MINTER_ROLE()",
		selector: [0xd5, 0x39, 0x13, 0x93],
	},
	FunctionSelector {
		name: "approve",
		signature: "approve(address,uint256)",
		selector: [0x09, 0x5e, 0xa7, 0xb3],
	},
	FunctionSelector {
		name: "balanceOf",
		signature: "balanceOf(address)",
		selector: [0x70, 0xa0, 0x82, 0x31],
	},
	FunctionSelector {
		name: "batchSetPrivileges",
		signature: "batchSetPrivileges((uint256,uint256,address,uint256)[])",
		selector: [0xea, 0x49, 0xca, 0x63],
	},
	FunctionSelector {
		name: "clonePrivilege",
		signature: "clonePrivilege(uint256,uint256,address)",
		selector: [0xf2, 0x28, 0xd6, 0xa4],
	},
	FunctionSelector {
		name: "getApproved",
		signature: "getApproved(uint256)",
		selector: [0x08, 0x18, 0x12, 0xfc],
	},
	FunctionSelector {
		name: "getRoleAdmin",
		signature: "getRoleAdmin(bytes32)",
		selector: [0x24, 0x8a, 0x9c, 0xa3],
	},
	FunctionSelector {
		name: "grantRole",
		signature: "grantRole(bytes32,address)",
		selector: [0x2f, 0x2f, 0xf1, 0x5d],
	},
	FunctionSelector {
		name: "hasPrivilege",
		signature: "hasPrivilege(uint256,uint256,address)",
		selector: [0x05, 0xd8, 0x0b, 0x00],
	},
	FunctionSelector {
		name: "hasRole",
		signature: "hasRole(bytes32,address)",
		selector: [0x91, 0xd1, 0x48, 0x54],
	},
	FunctionSelector {
		name: "isApprovedForAll",
		signature: "isApprovedForAll(address,address)",
		selector: [0xe9, 0x85, 0xe9, 0xc5],
	},
	FunctionSelector {
		name: "mint",
		signature: "mint(address)",
		selector: [0x6a, 0x62, 0x78, 0x42],
	},
	FunctionSelector {
		name: "name",
		signature: "name()",
		selector: [0x06, 0xfd, 0xde, 0x03],
	},
	FunctionSelector {
		name: "ownerOf",
		signature: "ownerOf(uint256)",
		selector: [0x63, 0x52, 0x21, 0x1e],
	},
	FunctionSelector {
		name: "privilegeExpires",
		signature: "privilegeExpires(uint256,uint256)",
		selector: [0x20, 0x7d, 0x8c, 0xd1],
	},
	FunctionSelector {
		name: "privilegeOf",
		signature: "privilegeOf(uint256,uint256)",
		selector: [0x84, 0x13, 0xc1, 0xdd],
	},
	FunctionSelector {
		name: "privilegeTotal",
		signature: "privilegeTotal()",
		selector: [0xa1, 0xa3, 0x7f, 0x45],
	},
	FunctionSelector {
		name: "renounceRole",
		signature: "renounceRole(bytes32,address)",
		selector: [0x36, 0x56, 0x8a, 0xbe],
	},
	FunctionSelector {
		name: "revokeRole",
		signature: "revokeRole(bytes32,address)",
		selector: [0xd5, 0x47, 0x74, 0x1f],
	},
	FunctionSelector {
		name: "safeTransferFrom",
		signature: "safeTransferFrom(address,address,uint256)",
		selector: [0x42, 0x84, 0x2e, 0x0e],
	},
	FunctionSelector {
		name: "safeTransferFrom",
		signature: "safeTransferFrom(address,address,uint256,bytes)",
		selector: [0xb8, 0x8d, 0x4f, 0xde],
	},
	FunctionSelector {
		name: "setApprovalForAll",
		signature: "setApprovalForAll(address,bool)",
		selector: [0xa2, 0x2c, 0xb4, 0x65],
	},
	FunctionSelector {
		name: "setBaseURI",
		signature: "setBaseURI(string)",
		selector: [0x55, 0xf8, 0x04, 0xb3],
	},
	FunctionSelector {
		name: "setPrivilege",
		signature: "setPrivilege(uint256,uint256,address,uint256)",
		selector: [0xec, 0xa3, 0x22, 0x1a],
	},
	FunctionSelector {
		name: "setPrivilegeTotal",
		signature: "setPrivilegeTotal(uint256)",
		selector: [0x93, 0x61, 0x0f, 0x8e],
	},
	FunctionSelector {
		name: "supportsInterface",
		signature: "supportsInterface(bytes4)",
		selector: [0x01, 0xff, 0xc9, 0xa7],
	},
	FunctionSelector {
		name: "symbol",
		signature: "symbol()",
		selector: [0x95, 0xd8, 0x9b, 0x41],
	},
	FunctionSelector {
		name: "tokenURI",
		signature: "tokenURI(uint256)",
		selector: [0xc8, 0x7b, 0x56, 0xdd],
	},
	FunctionSelector {
		name: "totalSupply",
		signature: "totalSupply()",
		selector: [0x18, 0x16, 0x0d, 0xdd],
	},
	FunctionSelector {
		name: "transferFrom",
		signature: "transferFrom(address,address,uint256)",
		selector: [0x23, 0xb8, 0x72, 0xdd],
	},
];
