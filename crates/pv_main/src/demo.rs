use pv_select::SelectList;

/// Renders the colour picker twice: styled with `Blue` preselected, then
/// restyled to four rows with `Yellow` selected.
pub fn demo() -> String {
    let mut list = SelectList::new("myList2").extra_attributes(r#"style="font-size:24px""#);
    list.add_option("Red", "Color1", false);
    list.add_option("Blue", "Color2", true);
    list.add_option("Yellow", "Color3", false);
    list.add_option("Green", "Color4", false);
    let first = list.render();

    list.extra_attributes.clear();
    list.size = 4;
    list.select_by_display("Yellow", false);
    list.select_by_value("Color3", false);
    let second = list.render();

    format!("{first}\n<br /><br />\n{second}")
}
