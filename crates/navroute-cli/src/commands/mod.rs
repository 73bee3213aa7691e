// Subcommand handlers: `route` plans a path through a graph file, `inspect`
// reports its size.

pub mod inspect;
pub mod route;
