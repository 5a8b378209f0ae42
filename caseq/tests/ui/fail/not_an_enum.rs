#[derive(caseq::CaseEquatable)]
struct NotAnEnum {
    field: u32,
}

fn main() {}
