use enumkit::{enumeration, Enumeration};

enumeration! {
    pub Alias: u8 {
        A = 3,
        B = A,
        C,
        D = B + 10,
        _default = C,
    }
}

fn main() {
    assert_eq!(Alias::B.to_integral(), 3);
    assert_eq!(Alias::C.to_integral(), 4);
    assert_eq!(Alias::D.to_integral(), 13);
    assert_eq!(Alias::default(), Alias::C);

    // The first valid member with a value names it.
    assert_eq!(Alias::B.desc(), Ok("A"));
    assert_eq!(Alias::family().desc(3), Ok("A"));
    assert_eq!(Alias::find("B"), Ok(Alias::A));
    assert_eq!(Alias::size(), 4);
}
