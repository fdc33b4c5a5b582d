mod algebra;
mod containers;
mod std_ops;
