use indoc::indoc;

use super::*;
use crate::syntax;

fn check(src: &str) -> Vec<String> {
  let program = syntax::parse(src).expect("source should parse");
  analyze(&program).into_iter().map(|d| d.message).collect()
}

#[test]
fn clean_program_is_accepted() {
  let src = indoc! {"
    def greet(name):
        message = \"hi \" + name
        print(message)
        return message

    greet(\"world\")
  "};
  assert_eq!(check(src), Vec::<String>::new());
}

#[test]
fn undefined_variable() {
  assert_eq!(check("print(unknown)\n"), vec!["Undefined variable 'unknown'"]);
}

#[test]
fn undefined_function() {
  assert_eq!(check("foo(1)\n"), vec!["Undefined function 'foo'"]);
}

#[test]
fn calling_a_variable_is_rejected() {
  assert_eq!(
    check("x = 1\nx()\n"),
    vec!["'x' is not a function or class"]
  );
}

#[test]
fn duplicate_function_in_the_same_scope() {
  let src = indoc! {"
    def f():
        return 1
    def f():
        return 2
  "};
  assert_eq!(
    check(src),
    vec!["Function 'f' already declared in current scope"]
  );
}

#[test]
fn duplicate_class_in_the_same_scope() {
  let src = indoc! {"
    class C:
        def m(self):
            return 1
    class C:
        def m(self):
            return 2
  "};
  assert_eq!(
    check(src),
    vec!["Class 'C' already declared in current scope"]
  );
}

#[test]
fn duplicate_parameter() {
  assert_eq!(
    check("def f(a, a):\n    return a\n"),
    vec!["Parameter 'a' already declared"]
  );
}

#[test]
fn return_outside_a_function() {
  assert_eq!(check("return 1\n"), vec!["Return statement outside function"]);
}

#[test]
fn loop_target_is_scoped_to_the_loop() {
  let src = indoc! {"
    for i in range(3):
        print(i)
    print(i)
  "};
  assert_eq!(check(src), vec!["Undefined variable 'i'"]);
}

#[test]
fn first_assignment_declares_the_name() {
  assert_eq!(check("x = 1\nprint(x)\nx = 2\n"), Vec::<String>::new());
}

#[test]
fn assignment_value_is_checked_before_the_target_declares() {
  assert_eq!(check("x = x + 1\n"), vec!["Undefined variable 'x'"]);
}

#[test]
fn function_scope_is_isolated() {
  let src = indoc! {"
    def f():
        y = 1
        return y
    print(y)
  "};
  assert_eq!(check(src), vec!["Undefined variable 'y'"]);
}

#[test]
fn recursion_sees_the_function_name() {
  let src = indoc! {"
    def fact(n):
        if n <= 1:
            return 1
        return n * fact(n - 1)
  "};
  assert_eq!(check(src), Vec::<String>::new());
}

#[test]
fn class_constructor_call_is_accepted() {
  let src = indoc! {"
    class P:
        def greet(self):
            return self

    p = P()
    print(p.greet())
  "};
  assert_eq!(check(src), Vec::<String>::new());
}

#[test]
fn method_and_attribute_names_are_not_checked() {
  assert_eq!(
    check("x = 1\nprint(x.anything)\nprint(x.whatever())\n"),
    Vec::<String>::new()
  );
}

#[test]
fn builtins_are_in_scope_from_the_start() {
  assert_eq!(
    check("print(len(str(int(float(bool(1))))))\n"),
    Vec::<String>::new()
  );
}

#[test]
fn diagnostics_are_batched_in_source_order() {
  let src = indoc! {"
    print(a)
    print(b)
    return 1
  "};
  assert_eq!(
    check(src),
    vec![
      "Undefined variable 'a'",
      "Undefined variable 'b'",
      "Return statement outside function",
    ]
  );
}
