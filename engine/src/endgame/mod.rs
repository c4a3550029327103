pub mod bitbases;
