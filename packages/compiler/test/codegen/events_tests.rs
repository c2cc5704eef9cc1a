//! Handler Code Synthesizer Tests

use template_compiler::codegen::NOOP_HANDLER;
use template_compiler::{
    gen_handlers, CodegenOptions, EventBindingTable, EventHandler, HandlerDescriptor,
    HandlerGenerator,
};

fn gen(event: &str, descriptor: HandlerDescriptor) -> String {
    HandlerGenerator::default().gen_descriptor(event, Some(&descriptor))
}

fn table_of(event: &str, descriptor: HandlerDescriptor) -> EventBindingTable {
    let mut table = EventBindingTable::new();
    table.insert(event, descriptor);
    table
}

#[test]
fn should_emit_bare_reference_without_modifiers() {
    assert_eq!(gen("click", HandlerDescriptor::new("doThing")), "doThing");
    assert_eq!(gen("click", HandlerDescriptor::new("a.b['c'][0]")), "a.b['c'][0]");
}

#[test]
fn should_emit_function_literals_verbatim() {
    assert_eq!(
        gen("click", HandlerDescriptor::new("e => go(e)")),
        "e => go(e)"
    );
    assert_eq!(
        gen("click", HandlerDescriptor::new("function($event){go($event)}")),
        "function($event){go($event)}"
    );
}

#[test]
fn should_wrap_statements() {
    assert_eq!(
        gen("click", HandlerDescriptor::new("count++")),
        "function($event){count++}"
    );
    assert_eq!(
        gen("click", HandlerDescriptor::new("go($event)")),
        "function($event){go($event)}"
    );
}

#[test]
fn should_invoke_path_after_key_filter() {
    assert_eq!(
        gen("keyup", HandlerDescriptor::new("onEnter").with_modifier("enter")),
        "function($event){if($event.keyCode!==13)return;onEnter($event)}"
    );
}

#[test]
fn should_match_round_trip_with_custom_event_param() {
    let generator = HandlerGenerator::new(CodegenOptions::new("eventArg", "_k").unwrap());
    let descriptor = HandlerDescriptor::new("onEnter").with_modifier("enter");
    assert_eq!(
        generator.gen_descriptor("keyup", Some(&descriptor)),
        "function(eventArg){if(eventArg.keyCode!==13)return;onEnter(eventArg)}"
    );
}

#[test]
fn should_emit_structural_guards_in_modifier_order() {
    assert_eq!(
        gen("click", HandlerDescriptor::new("submit()").with_modifiers(["stop", "self"])),
        "function($event){$event.stopPropagation();if($event.target!==$event.currentTarget)return;submit()}"
    );
    assert_eq!(
        gen("click", HandlerDescriptor::new("submit()").with_modifiers(["self", "prevent", "stop"])),
        "function($event){if($event.target!==$event.currentTarget)return;$event.preventDefault();$event.stopPropagation();submit()}"
    );
}

#[test]
fn should_apply_structural_modifiers_to_any_event() {
    assert_eq!(
        gen("submit", HandlerDescriptor::new("save").with_modifier("prevent")),
        "function($event){$event.preventDefault();save($event)}"
    );
}

#[test]
fn should_put_key_filter_before_all_guards() {
    assert_eq!(
        gen("keydown", HandlerDescriptor::new("go").with_modifiers(["stop", "prevent", "esc"])),
        "function($event){if($event.keyCode!==27)return;$event.stopPropagation();$event.preventDefault();go($event)}"
    );
    assert_eq!(
        gen("click", HandlerDescriptor::new("go").with_modifiers(["ctrl", "self", "13"])),
        "function($event){if($event.keyCode!==13)return;if(!$event.ctrlKey)return;if($event.target!==$event.currentTarget)return;go($event)}"
    );
}

#[test]
fn should_emit_mouse_guards_only_for_mouse_events() {
    assert_eq!(
        gen("click", HandlerDescriptor::new("go").with_modifier("ctrl")),
        "function($event){if(!$event.ctrlKey)return;go($event)}"
    );
    assert_eq!(
        gen("mouseenter", HandlerDescriptor::new("go").with_modifiers(["shift", "alt", "meta"])),
        "function($event){if(!$event.shiftKey)return;if(!$event.altKey)return;if(!$event.metaKey)return;go($event)}"
    );
    assert_eq!(
        gen("keyup", HandlerDescriptor::new("go").with_modifier("ctrl")),
        r#"function($event){if($event.keyCode!==_k("ctrl"))return;go($event)}"#
    );
}

#[test]
fn should_embed_function_literal_with_modifiers() {
    assert_eq!(
        gen("click", HandlerDescriptor::new("e => go(e)").with_modifier("stop")),
        "function($event){$event.stopPropagation();e => go(e)}"
    );
}

#[test]
fn should_combine_multiple_keys() {
    assert_eq!(
        gen("keyup", HandlerDescriptor::new("go").with_modifiers(["enter", "delete"])),
        "function($event){if($event.keyCode!==13&&$event.keyCode!==8&&$event.keyCode!==46)return;go($event)}"
    );
}

#[test]
fn should_emit_noop_for_absent_descriptor() {
    let mut table = EventBindingTable::new();
    table.insert_absent("focus");
    assert_eq!(gen_handlers(&table, false), r#"on:{"focus":function(){}}"#);
    assert_eq!(NOOP_HANDLER, "function(){}");
}

#[test]
fn should_emit_sequence_for_multiple_descriptors() {
    let generator = HandlerGenerator::default();
    let handler = EventHandler::from(vec![
        HandlerDescriptor::new("first"),
        HandlerDescriptor::new("value = $event.target.value").with_modifier("self"),
    ]);
    assert_eq!(
        generator.gen_handler("input", Some(&handler)),
        "[first,function($event){if($event.target!==$event.currentTarget)return;value = $event.target.value}]"
    );
}

#[test]
fn should_emit_noop_inside_sequence() {
    let handler = EventHandler::Multiple(vec![
        None,
        Some(HandlerDescriptor::new("save").with_modifier("prevent")),
        None,
    ]);
    assert_eq!(
        HandlerGenerator::default().gen_handler("input", Some(&handler)),
        "[function(){},function($event){$event.preventDefault();save($event)},function(){}]"
    );
}

#[test]
fn should_emit_empty_sequence() {
    let handler = EventHandler::Multiple(Vec::new());
    assert_eq!(HandlerGenerator::default().gen_handler("input", Some(&handler)), "[]");
}

#[test]
fn should_select_block_label() {
    let table = table_of("click", HandlerDescriptor::new("go"));
    assert_eq!(gen_handlers(&table, false), r#"on:{"click":go}"#);
    assert_eq!(gen_handlers(&table, true), r#"nativeOn:{"click":go}"#);
}

#[test]
fn should_keep_event_order_without_trailing_separator() {
    let mut table = EventBindingTable::new();
    table.insert("mouseup", HandlerDescriptor::new("up"));
    table.insert_absent("focus");
    table.insert("keyup", HandlerDescriptor::new("k()").with_modifier("enter"));
    table.insert(
        "input",
        vec![HandlerDescriptor::new("a"), HandlerDescriptor::new("b")],
    );
    assert_eq!(
        gen_handlers(&table, false),
        concat!(
            r#"on:{"mouseup":up,"focus":function(){},"#,
            r#""keyup":function($event){if($event.keyCode!==13)return;k()},"#,
            r#""input":[a,b]}"#
        )
    );
}

#[test]
fn should_be_deterministic_across_threads() {
    let mut table = EventBindingTable::new();
    table.insert("click", HandlerDescriptor::new("go").with_modifiers(["stop", "ctrl"]));
    table.insert("keyup", HandlerDescriptor::new("go").with_modifiers(["esc", "custom"]));
    let expected = gen_handlers(&table, false);
    let table = &table;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || gen_handlers(table, false)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
