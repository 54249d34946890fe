// Resume analysis: prompt the completion service, then normalize its reply into the
// response envelope together with locally extracted contact and section data.

pub mod handlers;
pub mod hints;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod requester;
