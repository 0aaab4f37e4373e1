pub mod locals;
