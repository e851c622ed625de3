pub mod fm2010;
