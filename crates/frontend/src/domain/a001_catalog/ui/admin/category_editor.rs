use contracts::domain::a001_catalog::ProgramField;
use leptos::prelude::*;

use super::fields::{ImageField, TextField};
use super::view_model::confirm;
use crate::shared::config_sync::ConfigContext;
use crate::shared::icons::icon;

#[component]
pub fn CategoryEditor(config: ConfigContext) -> impl IntoView {
    let category_ids = move || {
        config
            .with_config(|c| c.categories.iter().map(|cat| cat.id.clone()).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <div class="admin-section">
            <button
                class="button button--secondary"
                on:click=move |_| {
                    config.update(|c| {
                        c.add_category();
                    });
                }
            >
                {icon("plus")}
                "Add category"
            </button>
            <For
                each=category_ids
                key=|id| id.clone()
                children=move |id| view! { <CategoryBlock config=config category_id=id /> }
            />
        </div>
    }
}

#[component]
fn CategoryBlock(config: ConfigContext, category_id: String) -> impl IntoView {
    let id = StoredValue::new(category_id);

    let name = Signal::derive(move || {
        let id = id.get_value();
        config
            .with_config(|c| c.category(&id).map(|cat| cat.name.clone()))
            .flatten()
            .unwrap_or_default()
    });
    let rename = Callback::new(move |v: String| {
        let id = id.get_value();
        config.update(|c| {
            if let Some(category) = c.category_mut(&id) {
                category.name = v;
            }
        });
    });

    let program_ids = move || {
        let id = id.get_value();
        config
            .with_config(|c| {
                c.category(&id)
                    .map(|cat| cat.programs.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
            })
            .flatten()
            .unwrap_or_default()
    };

    let add_program = move |_| {
        let id = id.get_value();
        config.update(|c| {
            c.add_program(&id);
        });
    };

    let delete = move |_| {
        let message = format!(
            "Delete category \"{}\" with all its programs?",
            name.get_untracked()
        );
        if confirm(&message) {
            let id = id.get_value();
            config.update(|c| {
                c.remove_category(&id);
            });
        }
    };

    view! {
        <section class="admin-category">
            <div class="admin-category__header">
                <TextField label="Category name" value=name on_change=rename />
                <button class="button button--danger" title="Delete category" on:click=delete>
                    {icon("trash")}
                </button>
            </div>
            <For
                each=program_ids
                key=|id| id.clone()
                children=move |id| view! { <ProgramBlock config=config program_id=id /> }
            />
            <button class="button button--secondary" on:click=add_program>
                {icon("plus")}
                "Add program"
            </button>
        </section>
    }
}

#[component]
fn ProgramBlock(config: ConfigContext, program_id: String) -> impl IntoView {
    let id = StoredValue::new(program_id);

    let title = move || {
        let id = id.get_value();
        config
            .with_config(|c| c.program(&id).map(|p| p.name.clone()))
            .flatten()
            .unwrap_or_default()
    };

    let delete = move |_| {
        if confirm(&format!("Delete program \"{}\"?", title())) {
            let id = id.get_value();
            config.update(|c| {
                c.remove_program(&id);
            });
        }
    };

    let fields = ProgramField::all()
        .into_iter()
        .map(|field| {
            let value = Signal::derive(move || {
                let id = id.get_value();
                config
                    .with_config(|c| c.program(&id).map(|p| p.field(field)))
                    .flatten()
                    .unwrap_or_default()
            });
            let on_change = Callback::new(move |v: String| {
                let id = id.get_value();
                config.update(|c| {
                    if let Some(program) = c.program_mut(&id) {
                        program.set_field(field, v);
                    }
                });
            });
            match field {
                ProgramField::Image => view! {
                    <ImageField label=field.label() value=value on_change=on_change />
                }
                .into_any(),
                ProgramField::LongDescription => view! {
                    <TextField label=field.label() value=value on_change=on_change multiline=true />
                }
                .into_any(),
                _ => view! { <TextField label=field.label() value=value on_change=on_change /> }
                    .into_any(),
            }
        })
        .collect_view();

    view! {
        <details class="admin-program">
            <summary class="admin-program__summary">
                <span>{title}</span>
                <button class="button button--danger" title="Delete program" on:click=delete>
                    {icon("trash")}
                </button>
            </summary>
            {fields}
        </details>
    }
}
