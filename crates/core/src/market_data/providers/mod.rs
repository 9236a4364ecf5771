pub(crate) mod yahoo_provider;
