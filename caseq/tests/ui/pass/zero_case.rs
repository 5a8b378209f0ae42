use caseq::CaseEquatable;

#[derive(CaseEquatable)]
enum Never {}

fn takes_case_equatable<T: caseq::CaseEquatable>() {}

fn main() {
    // The vacuous comparison must still typecheck as a total function.
    takes_case_equatable::<Never>();
}
