pub mod protected;
