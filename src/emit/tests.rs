use indoc::indoc;

use super::*;
use crate::syntax;

fn gen(src: &str) -> String {
  emit(&syntax::parse(src).expect("source should parse"))
}

#[test]
fn print_lowers_to_console_log() {
  assert_eq!(gen("print(1, 2)\n"), "console.log(1, 2);");
}

#[test]
fn len_lowers_to_a_length_access() {
  assert_eq!(gen("len(x)\n"), "x.length;");
  assert_eq!(gen("len()\n"), "0;");
}

#[test]
fn conversion_builtins() {
  assert_eq!(gen("str(5)\n"), "String(5);");
  assert_eq!(gen("int(x)\n"), "parseInt(x);");
  assert_eq!(gen("float(x)\n"), "parseFloat(x);");
  assert_eq!(gen("bool(x)\n"), "Boolean(x);");
}

#[test]
fn list_and_dict_builtins_by_arity() {
  assert_eq!(gen("list()\n"), "[];");
  assert_eq!(gen("list(a, b)\n"), "[a, b];");
  assert_eq!(gen("dict()\n"), "{};");
  assert_eq!(gen("dict(x)\n"), "{x};");
}

#[test]
fn range_lowers_by_arity() {
  assert_eq!(gen("range(5)\n"), "Array.from({length: 5}, (_, i) => i);");
  assert_eq!(
    gen("range(1, 5)\n"),
    "Array.from({length: 5 - 1}, (_, i) => i + 1);"
  );
  assert_eq!(
    gen("range(0, 10, 2)\n"),
    "Array.from({length: Math.ceil((10 - 0) / 2)}, (_, i) => 0 + i * 2);"
  );
  assert_eq!(gen("range()\n"), "[];");
  assert_eq!(gen("range(1, 2, 3, 4)\n"), "[];");
}

#[test]
fn floor_division_lowers_to_math_floor() {
  assert_eq!(gen("x = 7 // 2\n"), "let x = Math.floor(7 / 2);");
}

#[test]
fn logical_operators_map_to_javascript() {
  assert_eq!(gen("a and b or not c\n"), "((a && b) || !c);");
}

#[test]
fn comparison_and_arithmetic_pass_through() {
  assert_eq!(gen("a <= b\n"), "(a <= b);");
  assert_eq!(gen("a != b\n"), "(a != b);");
  assert_eq!(gen("a ** b\n"), "(a ** b);");
  assert_eq!(gen("a % b\n"), "(a % b);");
}

#[test]
fn literal_lowering() {
  assert_eq!(gen("x = None\n"), "let x = null;");
  assert_eq!(gen("x = True\n"), "let x = true;");
  assert_eq!(gen("x = False\n"), "let x = false;");
  assert_eq!(gen("x = 42\n"), "let x = 42;");
  assert_eq!(gen("x = 1.5\n"), "let x = 1.5;");
  assert_eq!(gen("x = 1.0\n"), "let x = 1.0;");
}

#[test]
fn strings_are_rewrapped_in_double_quotes() {
  assert_eq!(gen("x = 'hi'\n"), "let x = \"hi\";");
  assert_eq!(gen("x = \"hi\"\n"), "let x = \"hi\";");
}

#[test]
fn uppercase_initial_marks_a_constructor() {
  assert_eq!(gen("Point(1, 2)\n"), "new Point(1, 2);");
  assert_eq!(gen("point(1, 2)\n"), "point(1, 2);");
}

#[test]
fn postfix_chains_emit_in_order() {
  assert_eq!(gen("a.b.c(1)[0]\n"), "a.b.c(1)[0];");
  assert_eq!(gen("xs[i].name\n"), "xs[i].name;");
}

#[test]
fn list_and_dict_literals() {
  assert_eq!(gen("[1, 2, 3]\n"), "[1, 2, 3];");
  assert_eq!(
    gen("{\"b\": 1, \"a\": 2}\n"),
    "{\"b\": 1, \"a\": 2};"
  );
}

#[test]
fn assignment_always_lowers_to_let() {
  assert_eq!(gen("x = 1\nx = 2\n"), "let x = 1;\nlet x = 2;");
}

#[test]
fn function_definitions_get_a_trailing_blank_line() {
  let src = indoc! {"
    def f():
        return
  "};
  assert_eq!(gen(src), "function f() {\n  return;\n}\n");
}

#[test]
fn while_loop() {
  let src = indoc! {"
    while a:
        b = 1
  "};
  assert_eq!(gen(src), "while (a) {\n  let b = 1;\n}");
}

#[test]
fn for_loop_over_an_expression() {
  let src = indoc! {"
    for item in xs:
        print(item)
  "};
  assert_eq!(gen(src), "for (const item of xs) {\n  console.log(item);\n}");
}
