pub mod code;
pub mod drive;
pub mod token_file;

#[cfg(not(target_arch = "wasm32"))]
pub use drive::FolderDrive;
pub use code::{WALLET_CODE_LEN, generate_wallet_code};
pub use drive::{DriveAccess, DriveDirectory, MemoryDrive, UnsupportedDrive};
pub use token_file::{WALLET_FILE_NAME, WalletDescriptor, parse_wallet_code};
