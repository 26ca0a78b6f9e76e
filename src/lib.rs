//! Converts CSV files into YAML fixture documents for the integration-test
//! data loader.

pub mod convert;
pub mod fixture;
