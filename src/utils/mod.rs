pub(crate) mod bincode;
