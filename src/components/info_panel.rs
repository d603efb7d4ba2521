use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Co2,
    Co2Eq,
    Renewable,
    Credits,
    Offsetting,
}

/// Which info panels are expanded. Every panel toggles on its own; all start closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OpenSections(HashMap<SectionId, bool>);

impl OpenSections {
    pub fn is_open(&self, id: SectionId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }
}

impl Reducible for OpenSections {
    type Action = SectionId;

    fn reduce(self: Rc<Self>, id: SectionId) -> Rc<Self> {
        let mut open = self.0.clone();
        let entry = open.entry(id).or_insert(false);
        *entry = !*entry;
        Rc::new(Self(open))
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoPanelProps {
    pub title: AttrValue,
    pub open: bool,
    #[prop_or_default]
    pub full_width: bool,
    pub on_toggle: Callback<()>,
    pub children: Children,
}

#[function_component(InfoPanel)]
pub fn info_panel(props: &InfoPanelProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("info-panel", props.full_width.then(|| "full-width"), props.open.then(|| "open"))}>
            <button class="info-panel-toggle" onclick={toggle}>
                <span class="info-panel-title">{&props.title}</span>
                <span class="chevron">{if props.open { "▴" } else { "▾" }}</span>
            </button>
            {
                if props.open {
                    html! {
                        <div class="info-panel-body">
                            { for props.children.iter() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_panels_start_closed() {
        let open = OpenSections::default();
        for id in [
            SectionId::Co2,
            SectionId::Co2Eq,
            SectionId::Renewable,
            SectionId::Credits,
            SectionId::Offsetting,
        ] {
            assert!(!open.is_open(id));
        }
    }

    #[test]
    fn toggling_one_panel_leaves_others_alone() {
        let open = Rc::new(OpenSections::default())
            .reduce(SectionId::Credits)
            .reduce(SectionId::Co2);

        assert!(open.is_open(SectionId::Credits));
        assert!(open.is_open(SectionId::Co2));
        assert!(!open.is_open(SectionId::Renewable));

        let open = open.reduce(SectionId::Credits);
        assert!(!open.is_open(SectionId::Credits));
        assert!(open.is_open(SectionId::Co2));
    }
}
