//! Response middleware.

pub(crate) mod etag;
