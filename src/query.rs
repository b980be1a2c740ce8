//! Client-side filtering over raw tweet account data.
//!
//! Mirrors the `memcmp` filters an RPC node applies in `getProgramAccounts`, so
//! the same offsets can be sent to a node or evaluated locally over fetched
//! accounts.

use pinocchio::pubkey::Pubkey;

use crate::{error::TwitterError, state::Tweet};

/// Matches `bytes` exactly at `offset` within account data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memcmp<'a> {
    pub offset: usize,
    pub bytes: &'a [u8],
}

impl<'a> Memcmp<'a> {
    pub fn discriminator() -> Memcmp<'static> {
        Memcmp {
            offset: 0,
            bytes: &Tweet::DISCRIMINATOR,
        }
    }

    pub fn author(author: &'a Pubkey) -> Self {
        Self {
            offset: Tweet::AUTHOR_OFFSET,
            bytes: author,
        }
    }

    /// Byte prefix of the topic. This is not an equality check: `"vegan"`
    /// also matches tweets on `"veganism"`.
    pub fn topic_prefix(prefix: &'a str) -> Self {
        Self {
            offset: Tweet::TOPIC_BYTES_OFFSET,
            bytes: prefix.as_bytes(),
        }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        self.offset
            .checked_add(self.bytes.len())
            .and_then(|end| data.get(self.offset..end))
            .is_some_and(|window| window == self.bytes)
    }
}

/// Decodes every account that carries the tweet discriminator and matches all
/// `filters`. Accounts that carry the discriminator but do not decode are
/// returned as `MalformedRecord` instead of being dropped.
pub fn scan<'d, I>(
    accounts: I,
    filters: &[Memcmp<'_>],
) -> Vec<Result<Tweet<'d>, TwitterError>>
where
    I: IntoIterator<Item = &'d [u8]>,
{
    let discriminator = Memcmp::discriminator();
    accounts
        .into_iter()
        .filter(|data| {
            discriminator.matches(data) && filters.iter().all(|filter| filter.matches(data))
        })
        .map(Tweet::unpack)
        .collect()
}
