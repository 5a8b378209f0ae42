#[derive(caseq::CaseEquatable)]
enum Wrapper<T> {
    Some(T),
    None,
}

fn main() {}
