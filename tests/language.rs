use std::{error::Error, fs};

use mython::{
    interpreter::lexer::{Token, tokenize},
    run,
};
use walkdir::WalkDir;

fn run_source(source: &str) -> Result<String, Box<dyn Error>> {
    let mut output = Vec::new();
    run(source, &mut output)?;
    Ok(String::from_utf8(output).expect("interpreter output is UTF-8"))
}

fn assert_output(source: &str, expected: &str) {
    match run_source(source) {
        Ok(actual) => assert_eq!(actual, expected, "program:\n{source}"),
        Err(e) => panic!("Script failed: {e}\nprogram:\n{source}"),
    }
}

fn assert_failure(source: &str) {
    if run_source(source).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

#[test]
fn arithmetic_and_print() {
    assert_output("x = 1 + 2 * 3\nprint x", "7\n");
    assert_output("print (1 + 2) * 3", "9\n");
    assert_output("print 8 - 5, 10 / 2, 7 / 2", "3 5 3\n");
    assert_output("print -5, -7 / 2", "-5 -3\n");
    assert_output("x = 5\nprint -x", "-5\n");
}

#[test]
fn print_formats_every_variant() {
    assert_output("print 1, 'two', True, False, None", "1 two True False None\n");
    assert_output("print", "\n");
    assert_output("print 'hello world'", "hello world\n");
    assert_output("class A:\n  def f(self):\n    return 1\nprint A", "Class A\n");
}

#[test]
fn string_literals_and_escapes() {
    assert_output("print 'a' + \"b\"", "ab\n");
    assert_output("print 'a\\tb'", "a\tb\n");
    assert_output("print \"quote: \\\"hi\\\"\"", "quote: \"hi\"\n");
    assert_output("print 'back\\\\slash'", "back\\slash\n");
    assert_output("print 'line\\nbreak'", "line\nbreak\n");
}

#[test]
fn class_with_init_and_method() {
    assert_output(concat!("class Point:\n",
                          "  def __init__(self, x, y):\n",
                          "    self.x = x\n",
                          "    self.y = y\n",
                          "  def sum(self):\n",
                          "    return self.x + self.y\n",
                          "p = Point(3, 4)\n",
                          "print p.sum()"),
                  "7\n");
}

#[test]
fn inheritance_and_override() {
    assert_output(concat!("class A:\n",
                          "  def greet(self):\n",
                          "    return \"A\"\n",
                          "class B(A):\n",
                          "  def greet(self):\n",
                          "    return \"B\"\n",
                          "print A().greet(), B().greet()"),
                  "A B\n");
}

#[test]
fn method_found_on_grandparent() {
    assert_output(concat!("class A:\n",
                          "  def name(self):\n",
                          "    return 'A'\n",
                          "class B(A):\n",
                          "  def f(self):\n",
                          "    return 1\n",
                          "class C(B):\n",
                          "  def g(self):\n",
                          "    return 2\n",
                          "print C().name()"),
                  "A\n");
}

#[test]
fn methods_dispatch_through_self() {
    // `greet` lives on the parent but `self.name()` resolves on the child.
    assert_output(concat!("class A:\n",
                          "  def greet(self):\n",
                          "    return self.name() + '!'\n",
                          "  def name(self):\n",
                          "    return 'A'\n",
                          "class B(A):\n",
                          "  def name(self):\n",
                          "    return 'B'\n",
                          "print B().greet()"),
                  "B!\n");
}

#[test]
fn str_hook_and_stringify() {
    assert_output(concat!("class Box:\n",
                          "  def __init__(self, v):\n",
                          "    self.v = v\n",
                          "  def __str__(self):\n",
                          "    return self.v\n",
                          "print Box(\"hi\")"),
                  "hi\n");
    assert_output(concat!("class Box:\n",
                          "  def __init__(self, v):\n",
                          "    self.v = v\n",
                          "  def __str__(self):\n",
                          "    return self.v\n",
                          "print str(Box('x')) + '!'"),
                  "x!\n");
    assert_output("print str(5) + str(6)", "56\n");
    assert_output("print str(None), str(1 < 2)", "None True\n");
}

#[test]
fn instance_without_str_hook_prints_an_address() {
    let output = run_source("class A:\n  def f(self):\n    return 1\nprint A()").unwrap();
    assert!(output.starts_with("0x"), "unexpected rendering: {output}");
    assert!(output.ends_with('\n'));
}

#[test]
fn truthiness_and_control_flow() {
    assert_output("x = 0\nif x:\n  print \"t\"\nelse:\n  print \"f\"", "f\n");
    assert_output("x = 3\nif x:\n  print \"t\"\nelse:\n  print \"f\"", "t\n");
    assert_output("if 'nonempty':\n  print 't'", "t\n");
    assert_output("if '':\n  print 't'\nelse:\n  print 'f'", "f\n");
    assert_output("if None:\n  print 't'\nelse:\n  print 'f'", "f\n");
    // Classes and instances are always falsy.
    assert_output(concat!("class A:\n",
                          "  def f(self):\n",
                          "    return 1\n",
                          "if A():\n",
                          "  print 't'\n",
                          "else:\n",
                          "  print 'f'"),
                  "f\n");
}

#[test]
fn nested_conditionals() {
    assert_output(concat!("x = 5\n",
                          "if x:\n",
                          "  if x > 3:\n",
                          "    print 'big'\n",
                          "  else:\n",
                          "    print 'small'"),
                  "big\n");
}

#[test]
fn early_return() {
    assert_output(concat!("class C:\n",
                          "  def f(self, x):\n",
                          "    if x:\n",
                          "      return 1\n",
                          "    return 2\n",
                          "print C().f(1), C().f(0)"),
                  "1 2\n");
}

#[test]
fn return_stops_the_method_body() {
    assert_output(concat!("class C:\n",
                          "  def f(self):\n",
                          "    return 1\n",
                          "    print 'unreachable'\n",
                          "print C().f()"),
                  "1\n");
}

#[test]
fn bare_return_and_fallthrough_yield_none() {
    assert_output(concat!("class C:\n",
                          "  def f(self):\n",
                          "    return\n",
                          "print C().f()"),
                  "None\n");
    assert_output(concat!("class C:\n",
                          "  def f(self):\n",
                          "    x = 1\n",
                          "print C().f()"),
                  "None\n");
}

#[test]
fn comparison_operators_on_builtins() {
    assert_output("print 1 < 2, 2 <= 2, 3 > 2, 2 >= 3, 1 != 2, 1 == 1",
                  "True True True False True True\n");
    assert_output("print 'a' < 'b', 'abc' == 'abc', 'b' >= 'c'",
                  "True True False\n");
    assert_output("print False < True, True <= True, True > False",
                  "True True True\n");
    assert_output("print None == None", "True\n");
}

#[test]
fn comparison_hooks_and_derived_operators() {
    assert_output(concat!("class R:\n",
                          "  def __init__(self, v):\n",
                          "    self.v = v\n",
                          "  def __eq__(self, other):\n",
                          "    return self.v == other.v\n",
                          "  def __lt__(self, other):\n",
                          "    return self.v < other.v\n",
                          "a = R(1)\n",
                          "b = R(2)\n",
                          "print a < b, a == b, a != b, a > b, a <= b, b >= a"),
                  "True False True False True True\n");
}

#[test]
fn add_hook_on_instances() {
    assert_output(concat!("class Acc:\n",
                          "  def __init__(self, n):\n",
                          "    self.n = n\n",
                          "  def __add__(self, other):\n",
                          "    self.n = self.n + other\n",
                          "    return self\n",
                          "a = Acc(1)\n",
                          "b = a + 41\n",
                          "print b.n"),
                  "42\n");
}

#[test]
fn logical_operators_are_eager() {
    // The right-hand side runs even when the left side decides the result.
    assert_output(concat!("class Spy:\n",
                          "  def poke(self):\n",
                          "    print 'evaluated'\n",
                          "    return True\n",
                          "x = True or Spy().poke()\n",
                          "print x"),
                  "evaluated\nTrue\n");
    assert_output(concat!("class Spy:\n",
                          "  def poke(self):\n",
                          "    print 'evaluated'\n",
                          "    return True\n",
                          "x = False and Spy().poke()\n",
                          "print x"),
                  "evaluated\nFalse\n");
    assert_output("print 1 and 'x', 0 or '', 0 or 1", "True False True\n");
}

#[test]
fn logical_not() {
    assert_output("print not 0, not 1, not '', not None", "True False True True\n");
    assert_output("print not not 5", "True\n");
}

#[test]
fn instances_are_shared_references() {
    assert_output(concat!("class Box:\n",
                          "  def __init__(self, v):\n",
                          "    self.v = v\n",
                          "p = Box(1)\n",
                          "q = p\n",
                          "q.v = 2\n",
                          "print p.v"),
                  "2\n");
}

#[test]
fn mutation_through_methods_is_visible() {
    assert_output(concat!("class Counter:\n",
                          "  def __init__(self):\n",
                          "    self.n = 0\n",
                          "  def bump(self):\n",
                          "    self.n = self.n + 1\n",
                          "    return self\n",
                          "c = Counter()\n",
                          "c.bump().bump()\n",
                          "print c.n"),
                  "2\n");
}

#[test]
fn init_is_skipped_when_arity_differs() {
    assert_output(concat!("class P:\n",
                          "  def __init__(self, x):\n",
                          "    self.x = x\n",
                          "p = P()\n",
                          "q = P(1, 2)\n",
                          "print 'made'"),
                  "made\n");
    // Without the constructor run, the field never appeared.
    assert_failure(concat!("class P:\n",
                           "  def __init__(self, x):\n",
                           "    self.x = x\n",
                           "p = P()\n",
                           "print p.x"));
}

#[test]
fn method_closures_do_not_see_globals() {
    assert_failure(concat!("g = 5\n",
                           "class C:\n",
                           "  def f(self):\n",
                           "    return g\n",
                           "print C().f()"));
    assert_failure(concat!("class C:\n",
                           "  def f(self):\n",
                           "    t = 99\n",
                           "    return t\n",
                           "c = C()\n",
                           "c.f()\n",
                           "print t"));
}

#[test]
fn arity_mismatch_shadows_ancestor_methods() {
    // The child's `f` is found first; the parent's matching arity is never
    // consulted.
    let source = concat!("class A:\n",
                         "  def f(self, x):\n",
                         "    return x\n",
                         "class B(A):\n",
                         "  def f(self):\n",
                         "    return 0\n");
    assert_failure(&format!("{source}print B().f(1)"));
    assert_output(&format!("{source}print B().f()"), "0\n");
}

#[test]
fn runtime_failures() {
    assert_failure("print 1 / 0");
    assert_failure("print y");
    assert_failure("x = 5\nprint x.y");
    assert_failure("print None == 1");
    assert_failure("print None < None");
    assert_failure("print 1 < None");
    assert_failure("print 1 < 'a'");
    assert_failure("print 1 + 'a'");
    assert_failure("print 'a' - 'b'");
    assert_failure("print -'a'");
    assert_failure("return 5");
    assert_failure(concat!("class A:\n",
                           "  def f(self):\n",
                           "    return 1\n",
                           "print A().g()"));
    assert_failure(concat!("class A:\n",
                           "  def f(self):\n",
                           "    return 1\n",
                           "print A().f(1)"));
    // A comparison hook must produce a boolean.
    assert_failure(concat!("class W:\n",
                           "  def __eq__(self, other):\n",
                           "    return 5\n",
                           "print W() == 1"));
}

#[test]
fn parse_failures() {
    assert_failure("class B(A):\n  def f(self):\n    return 1");
    assert_failure("class A:\n  def f():\n    return 1");
    assert_failure("def f(self):\n  return 1");
    assert_failure("x = Foo()");
    assert_failure("1 + 2 = 3");
    assert_failure("x = 1 < 2 < 3");
    assert_failure("if 1:");
    assert_failure("class A:\n  x = 1");
}

#[test]
fn lexer_failures() {
    assert_failure("if 1:\n   print 1"); // odd indentation
    assert_failure("if 1:\n    print 1"); // two levels at once
    assert_failure("x = 1 ! 2"); // stray '!'
    assert_failure("x = 07"); // leading zero
    assert_failure("x = 99999999999999999999999"); // out of range
    assert_failure("x = 'abc"); // unterminated string
    assert_failure("x = 'a\\qb'"); // unknown escape
}

#[test]
fn lexer_balances_indents_and_dedents() {
    let source = concat!("class A:\n",
                         "  def f(self):\n",
                         "    if 1:\n",
                         "      return 1\n",
                         "    return 2\n",
                         "x = 1\n");
    let tokens = tokenize(source).unwrap();

    let mut depth = 0i64;
    let mut indents = 0;
    let mut dedents = 0;
    for (token, _) in &tokens {
        match token {
            Token::Indent => {
                depth += 1;
                indents += 1;
            },
            Token::Dedent => {
                depth -= 1;
                dedents += 1;
            },
            _ => {},
        }
        assert!(depth >= 0, "dedent below depth zero");
    }

    assert_eq!(indents, 3);
    assert_eq!(indents, dedents);
    assert_eq!(tokens.last().unwrap().0, Token::Eof);
}

#[test]
fn blank_and_comment_lines_emit_nothing() {
    let tokens = tokenize("# leading comment\n\nx = 1  # trailing\n\n# done\n").unwrap();
    let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
    assert_eq!(kinds,
               vec![Token::Id("x".to_string()),
                    Token::Assign,
                    Token::Number(1),
                    Token::Newline,
                    Token::Eof]);
}

#[test]
fn missing_trailing_newline_is_synthesized() {
    let tokens = tokenize("print 1").unwrap();
    assert_eq!(tokens[tokens.len() - 2].0, Token::Newline);
    assert_eq!(tokens[tokens.len() - 1].0, Token::Eof);
}

#[test]
fn tokens_carry_their_source_line() {
    let tokens = tokenize("x = 1\n\ny = 2\n").unwrap();
    let lines: Vec<usize> = tokens.iter()
                                  .filter(|(token, _)| matches!(token, Token::Id(_)))
                                  .map(|(_, line)| *line)
                                  .collect();
    assert_eq!(lines, vec![1, 3]);
}

#[test]
fn program_fixtures_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "my"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match run_source(&source) {
            Ok(actual) => assert_eq!(actual, expected, "program {path:?}"),
            Err(e) => panic!("Program {path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}
