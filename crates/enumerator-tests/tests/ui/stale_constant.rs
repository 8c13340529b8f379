pub struct Kind(pub i32);
pub const KIND1: Kind = Kind(0);
pub const KIND2: Kind = Kind(5);

const _: () = {
    ::std::assert!(KIND1.0 == 0, "constant `KIND1` changed since generation; re-run enumerator");
    ::std::assert!(KIND2.0 == 1, "constant `KIND2` changed since generation; re-run enumerator");
};

fn main() {}
