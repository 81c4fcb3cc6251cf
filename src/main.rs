//! Satoverse entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::fmt::Write as _;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use satoverse::audio::{AudioManager, SoundEffect};
    use satoverse::economy::BuildingKind;
    use satoverse::platform::{FrameClock, pointer_to_field};
    use satoverse::renderer::RenderState;
    use satoverse::settings::theme_from_query;
    use satoverse::theme::CardStatus;
    use satoverse::ui::{Modal, Tab, format_balance, format_cost, format_rate};
    use satoverse::{App, Settings};

    /// Page skeleton; dynamic parts are filled by `Shell::sync_dom`
    const SKELETON: &str = r#"
<section id="loading">
  <h1 id="loading-title"></h1>
  <div id="meters"></div>
  <pre id="log"></pre>
</section>
<section id="main" class="hidden">
  <header>
    <div><h1 id="title"></h1><p id="tagline"></p></div>
    <nav id="socials"></nav>
    <button data-action="wallet">Connect Wallet</button>
  </header>
  <div id="tabs">
    <button id="tab-games" data-action="tab" data-tab="games"></button>
    <button id="tab-buildings" data-action="tab" data-tab="buildings"></button>
  </div>
  <div id="panel"></div>
  <footer>
    <span id="balance-label"></span> <strong id="balance"></strong>
    <button id="convert-btn" data-action="convert"></button>
  </footer>
</section>
<div id="convert-modal" class="modal hidden">
  <div class="modal-body">
    <h2 id="convert-title"></h2>
    <p id="convert-text"></p>
    <p><strong id="convert-balance"></strong></p>
    <button data-action="close">Close</button>
  </div>
</div>
<div id="game-modal" class="modal hidden">
  <div class="modal-body">
    <h2 id="game-title"></h2>
    <p>Score: <strong id="game-score">0</strong></p>
    <canvas id="canvas" width="480" height="480"></canvas>
    <p class="hint">Move to aim, click to fire. I: autopilot, M: mute, Esc: close</p>
    <button data-action="close">Close</button>
  </div>
</div>
"#;

    /// Everything the page needs between frames
    struct Shell {
        app: App,
        settings: Settings,
        render_state: Option<RenderState>,
        audio: AudioManager,
        clock: FrameClock,
        document: Document,
        canvas: HtmlCanvasElement,
        /// Last markup written to `#panel`
        panel_html: String,
        game_was_open: bool,
    }

    impl Shell {
        fn element(&self, id: &str) -> Option<Element> {
            self.document.get_element_by_id(id)
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.element(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.element(id) {
                let _ = el.class_list().toggle_with_force("hidden", hidden);
            }
        }

        /// One animation frame
        fn frame(&mut self, time: f64) {
            let dt = self.clock.delta(time);
            self.app.update(dt);

            for event in self.app.drain_events() {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }

            if self.app.ui.is_open(Modal::MiniGame) {
                self.render();
            }
            self.sync_dom();
        }

        fn render(&mut self) {
            let palette = self.app.theme.palette();
            let (Some(render_state), Some(session)) = (self.render_state.as_mut(), self.app.session())
            else {
                return;
            };
            match render_state.render(&session.state, palette) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Match the canvas backing store to its on-screen size
        fn fit_canvas(&mut self) {
            let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
            let width = (self.canvas.client_width() as f64 * dpr) as u32;
            let height = (self.canvas.client_height() as f64 * dpr) as u32;
            if width == 0 || height == 0 {
                return;
            }
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            if let Some(render_state) = self.render_state.as_mut() {
                render_state.resize(width, height);
            }
        }

        /// Fill the static labels for the active theme
        fn apply_theme_text(&self) {
            let theme = self.app.theme;
            let text = theme.text();
            if let Some(body) = self.document.body() {
                let _ = body.set_attribute("data-theme", theme.as_str());
            }
            self.document.set_title(text.title);
            self.set_text("loading-title", text.loading_title);
            self.set_text("title", text.title);
            self.set_text("tagline", text.tagline);
            self.set_text("tab-games", text.games_tab);
            self.set_text("tab-buildings", text.buildings_tab);
            self.set_text("balance-label", text.balance_label);
            self.set_text("convert-btn", text.convert_button);
            self.set_text("convert-title", text.convert_title);
            self.set_text("convert-text", text.convert_body);
            self.set_text("game-title", text.minigame_title);

            if let Some(nav) = self.element("socials") {
                let mut html = String::new();
                for link in theme.social_links() {
                    let _ = write!(
                        html,
                        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                        link.href, link.label
                    );
                }
                nav.set_inner_html(&html);
            }
        }

        /// Bring the DOM in line with the app state
        fn sync_dom(&mut self) {
            let loading = self.app.is_loading();
            self.set_hidden("loading", !loading);
            self.set_hidden("main", loading);
            if loading {
                self.sync_loading();
                return;
            }

            let currency = self.app.theme.text().currency;
            let balance = format_balance(self.app.economy.balance(), currency);
            self.set_text("balance", &balance);
            self.set_text("convert-balance", &balance);

            let on_games = self.app.ui.tab == Tab::Games;
            if let Some(el) = self.element("tab-games") {
                let _ = el.class_list().toggle_with_force("active", on_games);
            }
            if let Some(el) = self.element("tab-buildings") {
                let _ = el.class_list().toggle_with_force("active", !on_games);
            }

            let panel = if on_games {
                self.games_html()
            } else {
                self.buildings_html()
            };
            if panel != self.panel_html
                && let Some(el) = self.element("panel")
            {
                el.set_inner_html(&panel);
                self.panel_html = panel;
            }

            self.set_hidden("convert-modal", !self.app.ui.is_open(Modal::Convert));
            let game_open = self.app.ui.is_open(Modal::MiniGame);
            self.set_hidden("game-modal", !game_open);
            if let Some(session) = self.app.session() {
                self.set_text("game-score", &session.state.score.to_string());
            }
            if game_open && !self.game_was_open {
                self.fit_canvas();
            }
            self.game_was_open = game_open;
        }

        fn sync_loading(&self) {
            let loading = &self.app.loading;
            if let Some(el) = self.element("meters") {
                let mut html = String::new();
                for meter in &loading.meters {
                    let _ = write!(
                        html,
                        r#"<div class="meter"><span>{}</span><div class="bar"><div style="width:{}%"></div></div><span>{}%</span></div>"#,
                        meter.label, meter.value, meter.value
                    );
                }
                el.set_inner_html(&html);
            }
            let log_text: Vec<String> = loading
                .logs
                .iter()
                .map(|line| format!("[{}] {}", line.stamp(), line.message))
                .collect();
            self.set_text("log", &log_text.join("\n"));
        }

        fn games_html(&self) -> String {
            let text = self.app.theme.text();
            let mut html = String::new();
            for (index, card) in self.app.theme.games().iter().enumerate() {
                let footer = if card.coming_soon {
                    r#"<span class="soon">Coming soon</span>"#.to_string()
                } else if card.status == CardStatus::Active {
                    format!(
                        r#"<button data-action="play" data-index="{}">{}</button>"#,
                        index, text.play_action
                    )
                } else {
                    format!(
                        r#"<span class="lock">Unlocks at {}</span>"#,
                        card.market_cap.unwrap_or("?")
                    )
                };
                let class = match card.status {
                    CardStatus::Active => "card active",
                    CardStatus::Locked => "card locked",
                };
                let _ = write!(
                    html,
                    r#"<div class="{}"><div class="icon">{}</div><h3>{}</h3><p>{}</p>{}</div>"#,
                    class, card.icon, card.title, card.description, footer
                );
            }
            html
        }

        fn buildings_html(&self) -> String {
            let theme = self.app.theme;
            let currency = theme.text().currency;
            let economy = &self.app.economy;
            let mut html = String::new();
            for kind in BuildingKind::ALL {
                let info = theme.building(kind);
                let disabled = if economy.can_afford(kind) { "" } else { " disabled" };
                let _ = write!(
                    html,
                    r#"<div class="card"><div class="icon">{}</div><h3>{} <small>x{}</small></h3><p>{}</p><p class="rate">{}</p><button data-action="buy" data-key="{}"{}>{}</button></div>"#,
                    info.icon,
                    info.name,
                    economy.owned(kind),
                    info.description,
                    format_rate(kind.rate(), currency),
                    kind.key(),
                    disabled,
                    format_cost(kind.cost(), currency)
                );
            }
            html
        }

        /// Handle a click on an element carrying `data-action`
        fn handle_action(&mut self, action: &str, target: &Element) {
            match action {
                "tab" => match target.get_attribute("data-tab").as_deref() {
                    Some("games") => self.app.select_tab(Tab::Games),
                    Some("buildings") => self.app.select_tab(Tab::Buildings),
                    _ => {}
                },
                "play" => {
                    let index = target
                        .get_attribute("data-index")
                        .and_then(|v| v.parse::<usize>().ok());
                    if let Some(index) = index {
                        self.app.open_game(index);
                    }
                }
                "buy" => {
                    let kind = target
                        .get_attribute("data-key")
                        .and_then(|key| BuildingKind::from_key(&key));
                    if let Some(kind) = kind {
                        let effect = match self.app.purchase(kind) {
                            Some(_) => SoundEffect::Purchase,
                            None => SoundEffect::Denied,
                        };
                        self.audio.play(effect);
                    }
                }
                "convert" => {
                    self.app.open_convert();
                }
                "close" => {
                    self.app.close_modal();
                }
                "wallet" => self.app.connect_wallet(),
                other => log::debug!("Unhandled action: {}", other),
            }
            self.sync_dom();
        }

        fn aim_at(&mut self, offset_x: f32) {
            let width = self.canvas.client_width() as f32;
            if let Some(x) = pointer_to_field(offset_x, width) {
                self.app.aim(x);
            }
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.apply_settings(&self.settings);
            self.settings.save();
            log::info!("Muted: {}", muted);
        }
    }

    /// Local time of day in ms, used to stamp loading log lines
    fn time_of_day_ms() -> f64 {
        let now = js_sys::Date::new_0();
        let local = now.get_time() - now.get_timezone_offset() * 60_000.0;
        local.rem_euclid(86_400_000.0)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Satoverse starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let body = document.body().expect("no body");

        let settings = Settings::load();
        let search = window.location().search().unwrap_or_default();
        let theme = settings.effective_theme(theme_from_query(&search));

        let style = document.create_element("style").expect("create style");
        style.set_text_content(Some(include_str!("style.css")));
        let _ = body.append_child(&style);

        let root = document.create_element("div").expect("create root");
        root.set_id("app");
        root.set_inner_html(SKELETON);
        let _ = body.append_child(&root);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let app = App::new(theme, seed, time_of_day_ms());
        log::info!("App initialized with seed {} ({})", seed, theme.as_str());

        let shell = Rc::new(RefCell::new(Shell {
            app,
            audio: AudioManager::new(&settings),
            settings,
            render_state: None,
            clock: FrameClock::new(),
            document,
            canvas: canvas.clone(),
            panel_html: String::new(),
            game_was_open: false,
        }));
        shell.borrow().apply_theme_text();

        setup_click_handler(&root, shell.clone());
        setup_input_handlers(&canvas, shell.clone());
        setup_focus_handlers(shell.clone());

        // Start the frame loop before the GPU is ready so the loading screen runs
        request_animation_frame(shell.clone());

        match init_renderer(&canvas).await {
            Some(render_state) => shell.borrow_mut().render_state = Some(render_state),
            None => log::error!("WebGPU unavailable - mini-game field will not draw"),
        }

        log::info!("Satoverse running!");
    }

    async fn init_renderer(canvas: &HtmlCanvasElement) -> Option<RenderState> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| log::error!("Failed to create surface: {}", e))
            .ok()?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| log::error!("Failed to get adapter: {}", e))
            .ok()?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, canvas.width(), canvas.height())
            .await
            .map_err(|e| log::error!("Failed to get device: {}", e))
            .ok()
    }

    fn setup_click_handler(root: &Element, shell: Rc<RefCell<Shell>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(button) = target.closest("[data-action]").ok().flatten() else {
                return;
            };
            if let Some(action) = button.get_attribute("data-action") {
                shell.borrow_mut().handle_action(&action, &button);
            }
        });
        let _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, shell: Rc<RefCell<Shell>>) {
        // Mouse move - aim
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                shell.borrow_mut().aim_at(event.offset_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down - fire
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut s = shell.borrow_mut();
                s.aim_at(event.offset_x() as f32);
                s.app.fire();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - aim
        {
            let shell = shell.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    shell.borrow_mut().aim_at(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - aim and fire
        {
            let shell = shell.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut s = shell.borrow_mut();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    s.aim_at(x);
                }
                s.app.fire();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut s = shell.borrow_mut();
                match event.key().as_str() {
                    "Escape" => {
                        s.app.close_modal();
                    }
                    "i" | "I" => s.app.toggle_autopilot(),
                    "m" | "M" => s.toggle_mute(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_focus_handlers(shell: Rc<RefCell<Shell>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Visibility change (tab switch, minimize)
        {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let s = shell.borrow();
                let hidden = s.document.visibility_state() == web_sys::VisibilityState::Hidden;
                if s.settings.mute_on_blur {
                    s.audio.set_suspended(hidden);
                }
            });
            if let Some(document) = window.document() {
                let _ = document.add_event_listener_with_callback(
                    "visibilitychange",
                    closure.as_ref().unchecked_ref(),
                );
            }
            closure.forget();
        }

        // Window blur / focus
        for (name, suspended) in [("blur", true), ("focus", false)] {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let s = shell.borrow();
                if s.settings.mute_on_blur {
                    s.audio.set_suspended(suspended);
                }
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(shell, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(shell: Rc<RefCell<Shell>>, time: f64) {
        shell.borrow_mut().frame(time);
        request_animation_frame(shell);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Satoverse (native) starting...");
    log::info!("The page needs a browser - run with `trunk serve`; playing a headless demo instead");

    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session: load, buy, then let the autopilot play for a minute
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use satoverse::economy::BuildingKind;
    use satoverse::sim::GameEvent;
    use satoverse::ui::format_balance;
    use satoverse::{App, Theme};

    const FRAME_DT: f32 = 1.0 / 60.0;
    const DEMO_SECONDS: u32 = 60;

    let theme = std::env::args()
        .nth(1)
        .and_then(|name| name.parse::<Theme>().ok())
        .unwrap_or_default();
    let currency = theme.text().currency;
    let mut app = App::new(theme, 42, 0.0);

    while app.is_loading() {
        app.update(FRAME_DT);
    }
    for line in &app.loading.logs {
        log::info!("[{}] {}", line.stamp(), line.message);
    }

    app.purchase(BuildingKind::ALL[0]);

    app.toggle_autopilot();
    if !app.open_game(0) {
        log::error!("Mini-game did not open");
        return;
    }

    let (mut shots, mut kills) = (0u32, 0u32);
    for _ in 0..(DEMO_SECONDS * 60) {
        app.update(FRAME_DT);
        for event in app.drain_events() {
            match event {
                GameEvent::BulletFired { .. } => shots += 1,
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                GameEvent::EnemySpawned { .. } => {}
            }
        }
    }

    if let Some(session) = app.session() {
        log::info!(
            "Autopilot: {} shots, {} kills, score {}, {} enemies below the field",
            shots,
            kills,
            session.state.score,
            session.state.enemies_below_field()
        );
        match serde_json::to_string_pretty(&session.state) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Snapshot failed: {}", e),
        }
    }
    app.close_modal();

    // Spend the winnings, most expensive first
    for kind in BuildingKind::ALL.iter().rev() {
        while app.purchase(*kind).is_some() {}
    }
    for (kind, count) in app.economy.inventory().iter() {
        if count > 0 {
            log::info!("{} x{}", theme.building(kind).name, count);
        }
    }
    log::info!(
        "Final balance {} earning {}/s",
        format_balance(app.economy.balance(), currency),
        app.economy.income_per_tick()
    );
}
