use bytemuck::{Pod, Zeroable};
use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::TwitterError;

/// Maximum topic length, counted in characters rather than bytes.
pub const MAX_TOPIC_CHARS: usize = 50;

const U32_BYTES: usize = 4;

/// Fixed-width prefix of every tweet account.
///
/// Scanners match raw bytes against these offsets, so fields may only ever be
/// appended after `content`. Changing the layout requires a new discriminator.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TweetHeader {
    pub discriminator: [u8; 8],

    /// The signer the tweet is attributed to
    pub author: Pubkey,

    /// Unix timestamp, little-endian i64
    pub timestamp: [u8; 8],

    /// Byte length of the topic that follows, little-endian u32
    pub topic_len: [u8; 4],
}

impl TweetHeader {
    pub const LEN: usize = core::mem::size_of::<Self>();

    pub fn is_initialized(&self) -> bool {
        self.discriminator == Tweet::DISCRIMINATOR
    }

    pub fn timestamp(&self) -> i64 {
        i64::from_le_bytes(self.timestamp)
    }

    pub fn topic_len(&self) -> usize {
        u32::from_le_bytes(self.topic_len) as usize
    }
}

/// A tweet record, borrowed from either instruction data or account data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tweet<'a> {
    pub author: &'a Pubkey,
    pub timestamp: i64,
    pub topic: &'a str,
    pub content: &'a str,
}

impl<'a> Tweet<'a> {
    /// `sha256("account:Tweet")[..8]`
    pub const DISCRIMINATOR: [u8; 8] = [229, 13, 110, 58, 118, 6, 20, 79];

    pub const AUTHOR_OFFSET: usize = 8;
    pub const TIMESTAMP_OFFSET: usize = Self::AUTHOR_OFFSET + 32;
    /// Offset of the topic's length prefix.
    pub const TOPIC_OFFSET: usize = Self::TIMESTAMP_OFFSET + 8;
    /// Offset of the first topic byte.
    pub const TOPIC_BYTES_OFFSET: usize = Self::TOPIC_OFFSET + U32_BYTES;

    /// Exact account size needed to hold a tweet with this topic and content.
    pub const fn space(topic: &str, content: &str) -> usize {
        TweetHeader::LEN + topic.len() + U32_BYTES + content.len()
    }

    pub fn packed_len(&self) -> usize {
        Self::space(self.topic, self.content)
    }

    pub fn pack_into(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        let len = self.packed_len();
        if dst.len() < len {
            return Err(ProgramError::AccountDataTooSmall);
        }

        let header = TweetHeader {
            discriminator: Self::DISCRIMINATOR,
            author: *self.author,
            timestamp: self.timestamp.to_le_bytes(),
            topic_len: (self.topic.len() as u32).to_le_bytes(),
        };
        dst[..TweetHeader::LEN].copy_from_slice(bytemuck::bytes_of(&header));

        let content_len_start = Self::TOPIC_BYTES_OFFSET + self.topic.len();
        let content_start = content_len_start + U32_BYTES;
        dst[Self::TOPIC_BYTES_OFFSET..content_len_start].copy_from_slice(self.topic.as_bytes());
        dst[content_len_start..content_start]
            .copy_from_slice(&(self.content.len() as u32).to_le_bytes());
        dst[content_start..len].copy_from_slice(self.content.as_bytes());
        Ok(())
    }

    /// Decodes a tweet from account data. Bytes after `content` are ignored.
    pub fn unpack(data: &'a [u8]) -> Result<Self, TwitterError> {
        let header = data
            .get(..TweetHeader::LEN)
            .and_then(|bytes| bytemuck::try_from_bytes::<TweetHeader>(bytes).ok())
            .ok_or(TwitterError::MalformedRecord)?;
        if !header.is_initialized() {
            return Err(TwitterError::MalformedRecord);
        }

        let (topic, rest) = split_str(&data[TweetHeader::LEN..], header.topic_len())?;
        let content_len = rest
            .get(..U32_BYTES)
            .and_then(|slice| slice.try_into().ok())
            .map(u32::from_le_bytes)
            .ok_or(TwitterError::MalformedRecord)? as usize;
        let (content, _) = split_str(&rest[U32_BYTES..], content_len)?;

        Ok(Self {
            author: &header.author,
            timestamp: header.timestamp(),
            topic,
            content,
        })
    }
}

fn split_str(input: &[u8], len: usize) -> Result<(&str, &[u8]), TwitterError> {
    if input.len() < len {
        return Err(TwitterError::MalformedRecord);
    }
    let (bytes, rest) = input.split_at(len);
    let text = core::str::from_utf8(bytes).map_err(|_| TwitterError::MalformedRecord)?;
    Ok((text, rest))
}
