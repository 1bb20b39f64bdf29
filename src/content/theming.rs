// src/content/theming.rs
// Theme development: file layout, Smarty templates and asset registration.

use crate::registry::ContentSource;

pub const SOURCE: ContentSource = ContentSource::new(
    "theming",
    &[
        ("tema-estructura", ESTRUCTURA),
        ("tema-smarty", SMARTY),
        ("tema-assets", ASSETS),
    ],
);

const ESTRUCTURA: &str = r#"<article class="lesson">
  <h1>Anatomía de un tema</h1>
  <p>
    Un tema de PrestaShop 8 se instala en <code>themes/&lt;nombre&gt;/</code>.
    La forma más segura de empezar es un tema hijo de <em>classic</em>.
  </p>
  <pre><code>themes/mitema/
├── config/
│   └── theme.yml
├── assets/
│   ├── css/
│   └── js/
├── modules/
└── templates/
    ├── layouts/
    ├── catalog/
    └── checkout/</code></pre>
  <pre><code class="language-yaml">parent: classic
name: mitema
display_name: Mi tema
version: 1.0.0
assets:
  use_parent_assets: true</code></pre>
  <p>
    Documentación: <a href="https://devdocs.prestashop-project.org/8/themes/reference/template-inheritance/parent-child-feature/">temas hijo</a>.
  </p>
</article>"#;

const SMARTY: &str = r#"<article class="lesson">
  <h1>Plantillas Smarty</h1>
  <p>
    Las plantillas <code>.tpl</code> heredan unas de otras con
    <code>{extends}</code> y sobrescriben bloques con <code>{block}</code>.
  </p>
  <pre><code class="language-smarty">{extends file='catalog/product.tpl'}

{block name='product_prices'}
  {$smarty.block.parent}
  &lt;p class="envio-gratis"&gt;{l s='Envío gratis' d='Shop.Theme.Custom'}&lt;/p&gt;
{/block}</code></pre>
  <h2>Escapar la salida</h2>
  <p>
    Usa <code>{$variable|escape:'html':'UTF-8'}</code> para todo texto que
    venga del usuario. Los módulos pueden sobrescribir sus plantillas desde
    <code>themes/mitema/modules/</code>.
  </p>
  <p>
    Ver <a href="https://www.smarty.net/docs/en/">el manual de Smarty</a>.
  </p>
</article>"#;

const ASSETS: &str = r#"<article class="lesson">
  <h1>Hojas de estilo y scripts</h1>
  <p>
    Declara los recursos en <code>theme.yml</code> o regístralos desde un
    controlador. PrestaShop los combina y minimiza si activas CCC.
  </p>
  <pre><code class="language-yaml">assets:
  css:
    all:
      - id: mitema-custom
        path: assets/css/custom.css
        media: all
        priority: 200
  js:
    product:
      - id: mitema-galeria
        path: assets/js/galeria.js
        priority: 200</code></pre>
  <p>
    La clave bajo <code>css</code> o <code>js</code> es el controlador de
    página (<code>product</code>, <code>category</code>...) o
    <code>all</code>.
  </p>
  <p>
    Más en <a href="https://devdocs.prestashop-project.org/8/themes/getting-started/asset-management/">gestión de recursos</a>.
    Relacionado: <a href="/curso/modulo-hooks">registrar CSS desde un hook</a>.
  </p>
</article>"#;
