use caseq::CaseEquatable;

#[derive(CaseEquatable)]
enum Simple {
    A,
    B,
    C,
}

fn main() {
    assert!(Simple::B == SimpleRawCase::B);
    assert!(Simple::B != SimpleRawCase::A);
    assert!(Simple::C != SimpleRawCase::B);
}
