use pinocchio::pubkey::Pubkey;

pub mod error;
pub mod instruction;
pub mod processor;
pub mod query;
pub mod state;

pub use pinocchio;

/// `8MHS3bdh7Q2TSz3aTy1RzrbwujYjn4uJcNdW5pe7o3Z1`
pub const ID: Pubkey = [
    109, 52, 1, 17, 53, 73, 118, 241, 26, 130, 181, 55, 67, 204, 36, 207, 131, 86, 108, 87, 31,
    67, 79, 101, 230, 1, 158, 144, 107, 131, 179, 248,
];

/// Logs only when built with the `debug` feature.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        pinocchio_log::log!($($arg)*)
    };
}

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint {
    use pinocchio::{account_info::AccountInfo, program_entrypoint, pubkey::Pubkey, ProgramResult};

    fn process_instruction(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        crate::processor::process_instruction(program_id, accounts, instruction_data)
    }

    program_entrypoint!(process_instruction);
}
