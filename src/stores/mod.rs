pub mod complaint_store;
