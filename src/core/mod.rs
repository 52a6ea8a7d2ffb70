pub mod composer;
pub mod corpus;
pub mod pipeline;
pub mod sampler;
pub mod syllabifier;
pub mod weighted;
