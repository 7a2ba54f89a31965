use shared::ApiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub config: ApiConfig,
    pub children: Html,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    html! {
        <ContextProvider<ApiConfig> context={props.config.clone()}>
            {props.children.clone()}
        </ContextProvider<ApiConfig>>
    }
}
