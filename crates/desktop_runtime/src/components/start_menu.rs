use super::*;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = create_memo(move |_| state.with(|desktop| desktop.start_menu_open));
    let entries = state.with_untracked(|desktop| {
        desktop
            .registry
            .start_menu()
            .cloned()
            .collect::<Vec<_>>()
    });
    let profile = state.with_untracked(|desktop| desktop.shell.user_profile().clone());

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="start-menu-backdrop"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            />
            <nav
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                style=move || format!("bottom:{}px;", runtime.workspace.get().chrome_height)
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <ul class="start-menu-apps">
                    {entries
                        .iter()
                        .map(|app| {
                            let kind = app.kind.clone();
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        role="menuitem"
                                        on:click=move |_| {
                                            runtime.dispatch_action(DesktopAction::LaunchFromStartMenu {
                                                kind: kind.clone(),
                                            });
                                        }
                                    >
                                        <span aria-hidden="true">{app.icon.clone()}</span>
                                        <span>{app.label.clone()}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <footer class="start-menu-profile">
                    <strong>{profile.name.clone()}</strong>
                    <span>{profile.email.clone()}</span>
                </footer>
            </nav>
        </Show>
    }
}
