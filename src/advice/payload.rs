//! Wire formats accepted from advice providers.

use serde::Deserialize;

use super::error::AdviceError;
use super::Advice;
use crate::random::RandomSource;

/// Inner object of the adviceslip.com response.
#[derive(Debug, Clone, Deserialize)]
pub struct Slip {
    #[serde(default)]
    pub id: Option<u64>,
    pub advice: String,
}

/// Any body shape a provider may send.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// `{"slip": {"id": 1, "advice": "..."}}`
    Wrapped { slip: Slip },
    /// `{"advice": "...", "id": 1}`
    Flat {
        advice: String,
        #[serde(default)]
        id: Option<u64>,
    },
    /// `["...", "..."]`
    Collection(Vec<String>),
}

impl Payload {
    /// Reduce the payload to one piece of advice.
    ///
    /// Collections are sampled with `random` after blank entries are
    /// dropped; a collection with nothing left is an empty dataset.
    pub fn into_advice(self, random: &mut dyn RandomSource) -> Result<Advice, AdviceError> {
        let (text, id) = match self {
            Payload::Wrapped { slip } => (slip.advice, slip.id),
            Payload::Flat { advice, id } => (advice, id),
            Payload::Collection(mut entries) => {
                entries.retain(|entry| !entry.trim().is_empty());
                let index = random
                    .pick_index(entries.len())
                    .ok_or(AdviceError::EmptyDataset)?;
                (entries.swap_remove(index), None)
            }
        };

        if text.trim().is_empty() {
            return Err(AdviceError::malformed("advice text is empty"));
        }
        Ok(Advice { text, id })
    }
}

/// Parse a response body and pick the advice out of it.
pub fn parse_payload(body: &[u8], random: &mut dyn RandomSource) -> Result<Advice, AdviceError> {
    let payload: Payload = serde_json::from_slice(body)
        .map_err(|e| AdviceError::malformed(format!("unexpected body: {}", e)))?;
    payload.into_advice(random)
}
