mod arguments;
mod constraints;
