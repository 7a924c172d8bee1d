pub(crate) mod mapper;
