pub mod pep;
