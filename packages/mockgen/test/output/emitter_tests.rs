use gomockgen::output::Emitter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_parts_of_a_line() {
        let mut ctx = Emitter::create_root();
        ctx.print("a", false);
        ctx.print(" := ", false);
        ctx.println("b");
        assert_eq!(ctx.to_source(), "a := b\n");
    }

    #[test]
    fn should_indent_with_tabs() {
        let mut ctx = Emitter::create_root();
        ctx.println("func f() {");
        ctx.inc_indent();
        ctx.println("return");
        ctx.dec_indent();
        ctx.println("}");
        assert_eq!(ctx.to_source(), "func f() {\n\treturn\n}\n");
    }

    #[test]
    fn should_not_indent_blank_lines() {
        let mut ctx = Emitter::create_root();
        ctx.indented(|ctx| {
            ctx.println("x");
            ctx.blank_line();
            ctx.println("y");
        });
        assert_eq!(ctx.to_source(), "\tx\n\n\ty\n");
    }

    #[test]
    fn should_restore_indent_after_block() {
        let mut ctx = Emitter::create_root();
        let depth = ctx.block("if x {", "}", |ctx| {
            ctx.block("for {", "}", |ctx| {
                ctx.println("break");
                ctx.indent()
            })
        });
        assert_eq!(depth, 2);
        assert_eq!(ctx.indent(), 0);
        ctx.println("done");
        assert_eq!(
            ctx.to_source(),
            "if x {\n\tfor {\n\t\tbreak\n\t}\n}\ndone\n"
        );
    }

    #[test]
    fn should_restore_indent_when_body_fails() {
        let mut ctx = Emitter::create_root();
        let result: Result<(), String> = ctx.block("{", "}", |ctx| {
            ctx.println("partial");
            Err("boom".to_string())
        });
        assert!(result.is_err());
        assert_eq!(ctx.indent(), 0);
    }

    #[test]
    fn should_not_underflow_indent() {
        let mut ctx = Emitter::create_root();
        ctx.dec_indent();
        assert_eq!(ctx.indent(), 0);
        ctx.println("x");
        assert_eq!(ctx.to_source(), "x\n");
    }

    #[test]
    fn should_start_at_given_indent() {
        let mut ctx = Emitter::new(1);
        ctx.println("x");
        assert_eq!(ctx.to_source(), "\tx\n");
    }

    #[test]
    fn should_report_empty_lines() {
        let mut ctx = Emitter::default();
        assert!(ctx.line_is_empty());
        ctx.print("x", false);
        assert!(!ctx.line_is_empty());
        assert_eq!(ctx.to_source(), "x");
    }
}
