use pinocchio::{
    account_info::AccountInfo,
    get_account_info,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::{
    debug,
    error::TwitterError,
    instruction::TwitterInstruction,
    state::{Tweet, MAX_TOPIC_CHARS},
};

/// Checks a send-tweet request in order; the first failing rule wins.
///
/// Runs before anything is allocated, so a rejected request leaves the tweet
/// account untouched.
pub fn validate_send_tweet(
    slot_is_empty: bool,
    author_is_signer: bool,
    topic: &str,
) -> Result<(), TwitterError> {
    if !slot_is_empty {
        return Err(TwitterError::SlotAlreadyInitialized);
    }
    if !author_is_signer {
        return Err(TwitterError::MissingAuthorSignature);
    }
    if topic.chars().count() > MAX_TOPIC_CHARS {
        return Err(TwitterError::TopicTooLong);
    }
    Ok(())
}

fn fail(err: TwitterError) -> ProgramError {
    let message: &'static str = err.into();
    log!("Error: {}", message);
    err.into()
}

/// Gives the tweet account `space` bytes owned by `owner`, funded by `payer`.
///
/// An address that already holds lamports cannot go through `CreateAccount`,
/// so it is topped up to `lamports` and then allocated and assigned.
fn allocate_tweet_account(
    tweet_info: &AccountInfo,
    payer_info: &AccountInfo,
    space: usize,
    lamports: u64,
    owner: &Pubkey,
) -> ProgramResult {
    let current_lamports = tweet_info.lamports();
    if current_lamports == 0 {
        return CreateAccount {
            from: payer_info,
            to: tweet_info,
            lamports,
            space: space as u64,
            owner,
        }
        .invoke();
    }

    let shortfall = lamports.saturating_sub(current_lamports);
    if shortfall > 0 {
        Transfer {
            from: payer_info,
            to: tweet_info,
            lamports: shortfall,
        }
        .invoke()?;
    }
    Allocate {
        account: tweet_info,
        space: space as u64,
    }
    .invoke()?;
    Assign {
        account: tweet_info,
        owner,
    }
    .invoke()
}

pub fn process_initialize() -> ProgramResult {
    log!("Instruction: Initialize");
    Ok(())
}

pub fn process_send_tweet(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    topic: &str,
    content: &str,
    timestamp: i64,
    rent: &Rent,
) -> ProgramResult {
    log!("Instruction: SendTweet");

    let tweet_info = get_account_info!(accounts, 0);
    let author_info = get_account_info!(accounts, 1);
    let system_program_info = get_account_info!(accounts, 2);

    // Prefunded addresses still count as empty until something claims them.
    let slot_is_empty =
        tweet_info.data_is_empty() && tweet_info.owner() == &pinocchio_system::ID;
    validate_send_tweet(slot_is_empty, author_info.is_signer(), topic).map_err(fail)?;

    if system_program_info.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let space = Tweet::space(topic, content);
    let lamports = rent.minimum_balance(space);
    debug!("tweet space: {} lamports: {}", space, lamports);

    allocate_tweet_account(tweet_info, author_info, space, lamports, program_id)?;

    let tweet = Tweet {
        author: author_info.key(),
        timestamp,
        topic,
        content,
    };
    tweet.pack_into(&mut tweet_info.try_borrow_mut_data()?)
}

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    let instruction = TwitterInstruction::unpack(input)?;

    match instruction {
        TwitterInstruction::Initialize => process_initialize(),

        TwitterInstruction::SendTweet { topic, content } => {
            let clock = Clock::get()?;
            let rent = Rent::get()?;
            process_send_tweet(
                program_id,
                accounts,
                topic,
                content,
                clock.unix_timestamp,
                &rent,
            )
        }
    }
}
