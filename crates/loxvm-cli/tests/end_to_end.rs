//! End-to-end source-to-stdout scenarios: real source text through
//! `loxvm-compiler`, run through `loxvm-core` against a buffering host.

use loxvm_core::{CapturingHost, InterpretResult, Vm, VmOptions};

fn run(source: &str) -> (InterpretResult, Vec<String>) {
    let host = CapturingHost::default();
    let lines = host.lines_handle();
    let mut vm = Vm::with_options(VmOptions::default(), Box::new(host));
    let result = match loxvm_compiler::compile(source, vm.interner_mut()) {
        Ok(function) => vm.run(function),
        Err(errors) => panic!("unexpected compile errors: {errors:?}"),
    };
    let printed = lines.borrow().clone();
    (result, printed)
}

#[test]
fn arithmetic_precedence_and_string_concatenation() {
    let (result, printed) = run(r#"print 1 + 2 * 3; print "foo" + "bar";"#);
    assert_eq!(result, InterpretResult::Ok);
    assert_eq!(printed, vec!["7".to_string(), "foobar".to_string()]);
}

#[test]
fn recursive_fibonacci() {
    let source = r#"
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        print fib(10);
    "#;
    let (result, printed) = run(source);
    assert_eq!(result, InterpretResult::Ok);
    assert_eq!(printed, vec!["55".to_string()]);
}

#[test]
fn closures_share_a_captured_counter() {
    let source = r#"
        fun makeCounter() {
            var count = 0;
            fun increment() {
                count = count + 1;
                print count;
            }
            return increment;
        }
        var counter = makeCounter();
        counter();
        counter();
        counter();
    "#;
    let (result, printed) = run(source);
    assert_eq!(result, InterpretResult::Ok);
    assert_eq!(printed, vec!["1".to_string(), "2".to_string(), "3".to_string()]);
}

#[test]
fn calling_nil_is_a_runtime_error() {
    let (result, _) = run("var x = nil; x();");
    assert_eq!(result, InterpretResult::RuntimeError);
}

#[test]
fn unbounded_recursion_overflows_the_call_stack() {
    let source = r#"
        fun recurse() { return recurse(); }
        recurse();
    "#;
    let (result, _) = run(source);
    assert_eq!(result, InterpretResult::RuntimeError);
}
