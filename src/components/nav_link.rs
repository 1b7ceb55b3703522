use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinkProps {
    pub label: &'static str,
    pub target: &'static str,
    pub dimmed: bool,
    pub on_select: Callback<&'static str>,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let color = if props.dimmed {
        "rgba(0,0,0,0.4)"
    } else {
        "#000"
    };
    let onclick = {
        let on_select = props.on_select.clone();
        let target = props.target;
        Callback::from(move |_: MouseEvent| on_select.emit(target))
    };
    html! {
        <li {onclick} style={format!("position:relative; z-index:10; background:rgba(255,255,255,0.95); border-radius:6px; padding:0 8px; transition:color 0.3s; color:{};", color)}>
            { props.label }
        </li>
    }
}
