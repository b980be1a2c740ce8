use pinocchio::program_error::ProgramError;

#[derive(Clone, Debug, PartialEq)]
pub enum TwitterInstruction<'a> {
    /// Activation entry point, touches no accounts.
    Initialize,

    /// Creates a tweet account.
    ///
    /// Accounts expected:
    /// 0. `[writable, signer]` New tweet account
    /// 1. `[writable, signer]` Author, funds the tweet account
    /// 2. `[]` System program
    SendTweet { topic: &'a str, content: &'a str },
}

impl<'a> TwitterInstruction<'a> {
    pub fn unpack(input: &'a [u8]) -> Result<Self, ProgramError> {
        let (&tag, rest) = input
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;
        Ok(match tag {
            0 => Self::Initialize,
            1 => {
                let (topic, rest) = unpack_str(rest)?;
                let (content, _) = unpack_str(rest)?;
                Self::SendTweet { topic, content }
            }
            _ => return Err(ProgramError::InvalidInstructionData),
        })
    }

    /// Packs a [`TwitterInstruction`] into a byte buffer.
    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::Initialize => vec![0],
            Self::SendTweet { topic, content } => {
                let mut buf = Vec::with_capacity(1 + 4 + topic.len() + 4 + content.len());
                buf.push(1);
                pack_str(&mut buf, topic);
                pack_str(&mut buf, content);
                buf
            }
        }
    }
}

fn unpack_str(input: &[u8]) -> Result<(&str, &[u8]), ProgramError> {
    const U32_BYTES: usize = 4;

    let length = input
        .get(..U32_BYTES)
        .and_then(|slice| slice.try_into().ok())
        .map(u32::from_le_bytes)
        .ok_or(ProgramError::InvalidInstructionData)? as usize;
    let rest = &input[U32_BYTES..];
    if rest.len() < length {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (bytes, rest) = rest.split_at(length);
    let text = core::str::from_utf8(bytes).map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok((text, rest))
}

fn pack_str(buf: &mut Vec<u8>, text: &str) {
    buf.extend_from_slice(&(text.len() as u32).to_le_bytes());
    buf.extend_from_slice(text.as_bytes());
}
