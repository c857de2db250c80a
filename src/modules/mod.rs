pub mod pcp;
