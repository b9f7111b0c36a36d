mod macros;

mod spec;
