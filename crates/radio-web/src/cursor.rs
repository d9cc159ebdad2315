use radio_core::cursor_rule;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The one `<style>` element that positions the custom cursor.
///
/// Created once at startup; pointer moves only rewrite its text.
pub struct CursorStyle {
    el: web::HtmlStyleElement,
}

impl CursorStyle {
    pub fn install(document: &web::Document) -> anyhow::Result<Self> {
        let el = document
            .create_element("style")
            .map_err(|e| anyhow::anyhow!(format!("create <style>: {:?}", e)))?
            .dyn_into::<web::HtmlStyleElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        el.set_id("cursor-style");
        let parent: web::Element = match document.head() {
            Some(head) => head.into(),
            None => document
                .document_element()
                .ok_or_else(|| anyhow::anyhow!("no document element"))?,
        };
        parent
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!(format!("append <style>: {:?}", e)))?;
        Ok(Self { el })
    }

    pub fn move_to(&self, client_x: f32, client_y: f32) {
        self.el
            .set_text_content(Some(&cursor_rule(client_x, client_y)));
    }
}
