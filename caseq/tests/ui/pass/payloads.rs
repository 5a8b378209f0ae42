use caseq::CaseEquatable;

#[derive(CaseEquatable)]
enum Mixed {
    X,
    Y(f64),
    Z(i32, String),
    Plain { tag: u8 },
}

fn main() {
    assert!(Mixed::Y(1.0) == MixedRawCase::Y);
    assert!(Mixed::Z(1, "z".to_string()) == MixedRawCase::Z);
    assert!(Mixed::Plain { tag: 3 } == MixedRawCase::Plain);
    assert!(Mixed::X != MixedRawCase::Plain);
}
